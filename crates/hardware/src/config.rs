//! Configuration system for the vector simulator.
//!
//! This module turns the flat `name -> integer` parameter mapping handed over by the
//! front end into an immutable [`Config`] value. It provides:
//! 1. **Defaults:** Baseline latencies, queue depths and memory sizes for optional parameters.
//! 2. **Deserialization:** The mapping is read through serde (camelCase keys, unknown keys ignored,
//!    repeated keys rejected).
//! 3. **Validation:** Required keys and both ends of every value range are checked once, at load
//!    time, so the per-cycle loop never has to look a parameter up by name.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::value::{Error as ValueError, MapDeserializer};

use crate::common::constants::{
    IMEM_CAPACITY, MAX_ADDRESS_BITS, MAX_LATENCY, MAX_VECTOR_LENGTH, SDM_ADDRESS_BITS,
    VDM_ADDRESS_BITS,
};
use crate::common::{SimError, SimResult};
use crate::isa::UnitClass;

/// Default configuration constants for the simulator.
///
/// These values apply when the parameter mapping does not name the key.
mod defaults {
    /// Vector add/subtract/compare pipeline depth in cycles.
    pub const PIPELINE_DEPTH_ADD: i64 = 2;

    /// Vector multiply pipeline depth in cycles.
    pub const PIPELINE_DEPTH_MUL: i64 = 12;

    /// Vector divide pipeline depth in cycles.
    pub const PIPELINE_DEPTH_DIV: i64 = 8;

    /// Load-store pipeline depth in cycles.
    pub const PIPELINE_DEPTH_LOAD_STORE: i64 = 11;

    /// Scalar ALU issue latency. Scalar ops cost only their execute latency by default.
    pub const PIPELINE_DEPTH_SCALAR: i64 = 0;

    /// Cycles each element occupies a lane.
    pub const PER_ELEMENT_LATENCY: i64 = 1;

    /// Scalar ALU execute latency.
    pub const SCALAR_LATENCY: i64 = 1;

    /// Issue queue depth for every unit class.
    pub const QUEUE_DEPTH: i64 = 4;

    /// Lane count used by [`Config::default`](super::Config::default).
    pub const LANE_COUNT: usize = 4;

    /// Vector length used by [`Config::default`](super::Config::default).
    pub const VECTOR_LENGTH: usize = 64;
}

/// Timing and capacity parameters of one functional-unit class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConfig {
    /// Cycles before the first element result is produced.
    pub issue_latency: u64,
    /// Cycles each group of `lanes` elements occupies the unit.
    pub per_element_latency: u64,
    /// Number of physical lanes.
    pub lanes: usize,
    /// Whether a new operation may start while earlier ones are still in flight.
    pub pipelined: bool,
    /// Depth of the issue queue in front of the unit.
    pub queue_depth: usize,
}

/// Validated, immutable simulator configuration.
///
/// Construct once with [`Config::from_parameters`] (or [`Config::default`]) and pass
/// by reference to every component constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Physical lanes of the vector units.
    pub lane_count: usize,
    /// Elements per vector register; also the reset value of VLR.
    pub vector_length: usize,
    /// Vector add/subtract/compare unit.
    pub add: UnitConfig,
    /// Vector multiply unit.
    pub mul: UnitConfig,
    /// Vector divide unit.
    pub div: UnitConfig,
    /// Load-store unit (vector and scalar memory).
    pub load_store: UnitConfig,
    /// Scalar ALU (also executes vector length and mask control).
    pub scalar: UnitConfig,
    /// Scalar memory holds `2^scalar_memory_bits` words.
    pub scalar_memory_bits: u32,
    /// Vector memory holds `2^vector_memory_bits` words.
    pub vector_memory_bits: u32,
}

impl Config {
    /// Builds a configuration from a `name -> value` parameter mapping.
    ///
    /// Unrecognized keys are ignored. `vectorLaneCount` and `vectorLengthDefault` are
    /// required; every other key falls back to its default.
    ///
    /// # Errors
    ///
    /// [`SimError::ConfigurationMissing`] for an absent required key,
    /// [`SimError::ConfigurationInvalid`] for a value outside its legal range and
    /// [`SimError::ConfigurationMalformed`] when a recognized key appears more than once.
    pub fn from_parameters<I, K>(params: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let pairs = params
            .into_iter()
            .map(|(key, value)| -> (String, i64) { (key.into(), value) });
        let raw = Parameters::deserialize(MapDeserializer::<_, ValueError>::new(pairs))
            .map_err(|e| SimError::ConfigurationMalformed {
                reason: e.to_string(),
            })?;
        raw.validate()
    }

    /// Convenience wrapper over [`Config::from_parameters`] for an owned map.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_parameters`].
    pub fn from_map(params: &HashMap<String, i64>) -> SimResult<Self> {
        Self::from_parameters(params.iter().map(|(k, v)| (k.clone(), *v)))
    }

    /// Parameters of the functional unit serving `class`.
    #[inline]
    pub const fn unit(&self, class: UnitClass) -> &UnitConfig {
        match class {
            UnitClass::Add => &self.add,
            UnitClass::Multiply => &self.mul,
            UnitClass::Divide => &self.div,
            UnitClass::LoadStore => &self.load_store,
            UnitClass::Scalar => &self.scalar,
        }
    }

    /// Number of words in scalar memory.
    #[inline]
    pub const fn scalar_memory_words(&self) -> usize {
        1 << self.scalar_memory_bits
    }

    /// Number of words in vector memory.
    #[inline]
    pub const fn vector_memory_words(&self) -> usize {
        1 << self.vector_memory_bits
    }
}

impl Default for Config {
    /// Four lanes, 64-element vectors, default latencies and queue depths.
    fn default() -> Self {
        let mut raw = Parameters::default();
        raw.vector_lane_count = Some(defaults::LANE_COUNT as i64);
        raw.vector_length_default = Some(defaults::VECTOR_LENGTH as i64);
        raw.build()
    }
}

/// The raw parameter record as read from the mapping, before range checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    vector_lane_count: Option<i64>,
    vector_length_default: Option<i64>,

    #[serde(default = "Parameters::default_depth_add")]
    pipeline_depth_add: i64,
    #[serde(default = "Parameters::default_depth_mul")]
    pipeline_depth_mul: i64,
    #[serde(default = "Parameters::default_depth_div")]
    pipeline_depth_div: i64,
    #[serde(default = "Parameters::default_depth_load_store")]
    pipeline_depth_load_store: i64,
    #[serde(default = "Parameters::default_depth_scalar")]
    pipeline_depth_scalar: i64,

    #[serde(default = "Parameters::default_per_element")]
    per_element_latency_add: i64,
    #[serde(default = "Parameters::default_per_element")]
    per_element_latency_mul: i64,
    #[serde(default = "Parameters::default_per_element")]
    per_element_latency_div: i64,
    #[serde(default = "Parameters::default_per_element")]
    per_element_latency_load_store: i64,
    #[serde(default = "Parameters::default_scalar_latency")]
    scalar_latency: i64,

    #[serde(default = "Parameters::default_queue_depth")]
    queue_depth_add: i64,
    #[serde(default = "Parameters::default_queue_depth")]
    queue_depth_mul: i64,
    #[serde(default = "Parameters::default_queue_depth")]
    queue_depth_div: i64,
    #[serde(default = "Parameters::default_queue_depth")]
    queue_depth_load_store: i64,
    #[serde(default = "Parameters::default_queue_depth")]
    queue_depth_scalar: i64,

    #[serde(default = "Parameters::enabled")]
    pipelined_add: i64,
    #[serde(default = "Parameters::enabled")]
    pipelined_mul: i64,
    #[serde(default)]
    pipelined_div: i64,
    #[serde(default = "Parameters::enabled")]
    pipelined_load_store: i64,

    #[serde(default = "Parameters::default_sdm_bits")]
    scalar_memory_address_bits: i64,
    #[serde(default = "Parameters::default_vdm_bits")]
    vector_memory_address_bits: i64,

    #[serde(default)]
    out_of_order_completion: i64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            vector_lane_count: None,
            vector_length_default: None,
            pipeline_depth_add: defaults::PIPELINE_DEPTH_ADD,
            pipeline_depth_mul: defaults::PIPELINE_DEPTH_MUL,
            pipeline_depth_div: defaults::PIPELINE_DEPTH_DIV,
            pipeline_depth_load_store: defaults::PIPELINE_DEPTH_LOAD_STORE,
            pipeline_depth_scalar: defaults::PIPELINE_DEPTH_SCALAR,
            per_element_latency_add: defaults::PER_ELEMENT_LATENCY,
            per_element_latency_mul: defaults::PER_ELEMENT_LATENCY,
            per_element_latency_div: defaults::PER_ELEMENT_LATENCY,
            per_element_latency_load_store: defaults::PER_ELEMENT_LATENCY,
            scalar_latency: defaults::SCALAR_LATENCY,
            queue_depth_add: defaults::QUEUE_DEPTH,
            queue_depth_mul: defaults::QUEUE_DEPTH,
            queue_depth_div: defaults::QUEUE_DEPTH,
            queue_depth_load_store: defaults::QUEUE_DEPTH,
            queue_depth_scalar: defaults::QUEUE_DEPTH,
            pipelined_add: 1,
            pipelined_mul: 1,
            pipelined_div: 0,
            pipelined_load_store: 1,
            scalar_memory_address_bits: i64::from(SDM_ADDRESS_BITS),
            vector_memory_address_bits: i64::from(VDM_ADDRESS_BITS),
            out_of_order_completion: 0,
        }
    }
}

impl Parameters {
    fn default_depth_add() -> i64 {
        defaults::PIPELINE_DEPTH_ADD
    }

    fn default_depth_mul() -> i64 {
        defaults::PIPELINE_DEPTH_MUL
    }

    fn default_depth_div() -> i64 {
        defaults::PIPELINE_DEPTH_DIV
    }

    fn default_depth_load_store() -> i64 {
        defaults::PIPELINE_DEPTH_LOAD_STORE
    }

    fn default_depth_scalar() -> i64 {
        defaults::PIPELINE_DEPTH_SCALAR
    }

    fn default_per_element() -> i64 {
        defaults::PER_ELEMENT_LATENCY
    }

    fn default_scalar_latency() -> i64 {
        defaults::SCALAR_LATENCY
    }

    fn default_queue_depth() -> i64 {
        defaults::QUEUE_DEPTH
    }

    fn enabled() -> i64 {
        1
    }

    fn default_sdm_bits() -> i64 {
        i64::from(SDM_ADDRESS_BITS)
    }

    fn default_vdm_bits() -> i64 {
        i64::from(VDM_ADDRESS_BITS)
    }

    /// Range-checks every field and assembles the final [`Config`].
    fn validate(self) -> SimResult<Config> {
        let lanes = required("vectorLaneCount", self.vector_lane_count)?;
        let vlen = required("vectorLengthDefault", self.vector_length_default)?;
        positive("vectorLaneCount", lanes)?;
        positive("vectorLengthDefault", vlen)?;
        at_most("vectorLaneCount", lanes, MAX_VECTOR_LENGTH as i64)?;
        at_most("vectorLengthDefault", vlen, MAX_VECTOR_LENGTH as i64)?;

        for (key, value) in [
            ("pipelineDepthAdd", self.pipeline_depth_add),
            ("pipelineDepthMul", self.pipeline_depth_mul),
            ("pipelineDepthDiv", self.pipeline_depth_div),
            ("pipelineDepthLoadStore", self.pipeline_depth_load_store),
            ("pipelineDepthScalar", self.pipeline_depth_scalar),
        ] {
            non_negative(key, value)?;
            at_most(key, value, MAX_LATENCY)?;
        }
        for (key, value) in [
            ("perElementLatencyAdd", self.per_element_latency_add),
            ("perElementLatencyMul", self.per_element_latency_mul),
            ("perElementLatencyDiv", self.per_element_latency_div),
            ("perElementLatencyLoadStore", self.per_element_latency_load_store),
            ("scalarLatency", self.scalar_latency),
        ] {
            positive(key, value)?;
            at_most(key, value, MAX_LATENCY)?;
        }
        for (key, value) in [
            ("queueDepthAdd", self.queue_depth_add),
            ("queueDepthMul", self.queue_depth_mul),
            ("queueDepthDiv", self.queue_depth_div),
            ("queueDepthLoadStore", self.queue_depth_load_store),
            ("queueDepthScalar", self.queue_depth_scalar),
        ] {
            positive(key, value)?;
            at_most(key, value, IMEM_CAPACITY as i64)?;
        }
        for (key, value) in [
            ("pipelinedAdd", self.pipelined_add),
            ("pipelinedMul", self.pipelined_mul),
            ("pipelinedDiv", self.pipelined_div),
            ("pipelinedLoadStore", self.pipelined_load_store),
        ] {
            flag(key, value)?;
        }
        for (key, value) in [
            ("scalarMemoryAddressBits", self.scalar_memory_address_bits),
            ("vectorMemoryAddressBits", self.vector_memory_address_bits),
        ] {
            if !(1..=i64::from(MAX_ADDRESS_BITS)).contains(&value) {
                return Err(invalid(key, value, "address width must be in 1..=24"));
            }
        }
        if self.out_of_order_completion != 0 {
            return Err(invalid(
                "outOfOrderCompletion",
                self.out_of_order_completion,
                "only in-order completion is modeled",
            ));
        }

        let mut checked = self;
        checked.vector_lane_count = Some(lanes);
        checked.vector_length_default = Some(vlen);
        Ok(checked.build())
    }

    /// Assembles a [`Config`] from an already validated record.
    fn build(self) -> Config {
        let lanes = self.vector_lane_count.unwrap_or(1) as usize;
        let vector_unit = |depth: i64, per_element: i64, pipelined: i64, queue: i64| UnitConfig {
            issue_latency: depth as u64,
            per_element_latency: per_element as u64,
            lanes,
            pipelined: pipelined != 0,
            queue_depth: queue as usize,
        };

        Config {
            lane_count: lanes,
            vector_length: self.vector_length_default.unwrap_or(1) as usize,
            add: vector_unit(
                self.pipeline_depth_add,
                self.per_element_latency_add,
                self.pipelined_add,
                self.queue_depth_add,
            ),
            mul: vector_unit(
                self.pipeline_depth_mul,
                self.per_element_latency_mul,
                self.pipelined_mul,
                self.queue_depth_mul,
            ),
            div: vector_unit(
                self.pipeline_depth_div,
                self.per_element_latency_div,
                self.pipelined_div,
                self.queue_depth_div,
            ),
            load_store: vector_unit(
                self.pipeline_depth_load_store,
                self.per_element_latency_load_store,
                self.pipelined_load_store,
                self.queue_depth_load_store,
            ),
            scalar: UnitConfig {
                issue_latency: self.pipeline_depth_scalar as u64,
                per_element_latency: self.scalar_latency as u64,
                lanes: 1,
                pipelined: true,
                queue_depth: self.queue_depth_scalar as usize,
            },
            scalar_memory_bits: self.scalar_memory_address_bits as u32,
            vector_memory_bits: self.vector_memory_address_bits as u32,
        }
    }
}

fn required(key: &'static str, value: Option<i64>) -> SimResult<i64> {
    value.ok_or(SimError::ConfigurationMissing { key })
}

fn positive(key: &str, value: i64) -> SimResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(invalid(key, value, "must be at least 1"))
    }
}

fn non_negative(key: &str, value: i64) -> SimResult<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(invalid(key, value, "must not be negative"))
    }
}

fn at_most(key: &str, value: i64, limit: i64) -> SimResult<()> {
    if value <= limit {
        Ok(())
    } else {
        Err(invalid(key, value, "exceeds the supported maximum"))
    }
}

fn flag(key: &str, value: i64) -> SimResult<()> {
    if value == 0 || value == 1 {
        Ok(())
    } else {
        Err(invalid(key, value, "must be 0 or 1"))
    }
}

fn invalid(key: &str, value: i64, reason: &'static str) -> SimError {
    SimError::ConfigurationInvalid {
        key: key.to_owned(),
        value,
        reason,
    }
}
