//! Last-write-wins floating point gauge.

use std::sync::atomic::{AtomicU64, Ordering};

use super::Desc;

/// `f64` gauge stored as raw bits in an `AtomicU64`.
#[derive(Debug)]
pub struct Gauge {
    desc: Desc,
    bits: AtomicU64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSnapshot {
    pub desc: Desc,
    pub value: f64,
}

impl Gauge {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            desc: Desc::new(name, help),
            bits: AtomicU64::new(0f64.to_bits()),
        }
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn read(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    pub fn snapshot(&self) -> GaugeSnapshot {
        GaugeSnapshot {
            desc: self.desc.clone(),
            value: self.read(),
        }
    }
}
