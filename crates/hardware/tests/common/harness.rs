use tracing_subscriber::EnvFilter;
use vecsim_core::core::ArchState;
use vecsim_core::isa::Instruction;
use vecsim_core::{Config, SimResult, SimulationReport, Simulator};

/// Installs a test-writer subscriber once per test binary. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a [`Config`] from parameter pairs.
pub fn config(params: &[(&'static str, i64)]) -> Config {
    Config::from_parameters(params.iter().copied()).expect("valid test configuration")
}

pub struct TestContext {
    pub config: Config,
    pub state: ArchState,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Four lanes, eight-element vectors, every other parameter at its default.
    pub fn new() -> Self {
        Self::with_params(&[("vectorLaneCount", 4), ("vectorLengthDefault", 8)])
    }

    pub fn with_params(params: &[(&'static str, i64)]) -> Self {
        init_tracing();
        let config = config(params);
        let state = ArchState::new(&config, &[], &[]).expect("empty memory images fit");
        Self { config, state }
    }

    /// Set a scalar register before the run.
    pub fn sreg(mut self, idx: usize, val: i32) -> Self {
        self.state.srf.write(idx, val).expect("scalar register in range");
        self
    }

    /// Set a whole vector register before the run.
    pub fn vreg(mut self, idx: usize, values: &[i32]) -> Self {
        self.state.vrf.write(idx, values).expect("vector register in range");
        self
    }

    /// Fill every element of a vector register with `val`.
    pub fn vsplat(self, idx: usize, val: i32) -> Self {
        let values = vec![val; self.config.vector_length];
        self.vreg(idx, &values)
    }

    pub fn mask(mut self, bits: &[bool]) -> Self {
        self.state.vcr.set_mask(bits);
        self
    }

    /// Write consecutive scalar memory words starting at `addr`.
    pub fn scalar_memory(mut self, addr: i64, words: &[i32]) -> Self {
        for (i, w) in words.iter().enumerate() {
            self.state.sdm.write(addr + i as i64, *w).expect("scalar address in range");
        }
        self
    }

    /// Write consecutive vector memory words starting at `addr`.
    pub fn vector_memory(mut self, addr: i64, words: &[i32]) -> Self {
        for (i, w) in words.iter().enumerate() {
            self.state.vdm.write(addr + i as i64, *w).expect("vector address in range");
        }
        self
    }

    /// A simulator ready to be stepped.
    pub fn simulator(self, program: Vec<Instruction>) -> Simulator {
        Simulator::with_state(&self.config, program, self.state).expect("program fits the store")
    }

    /// Runs `program` to completion, returning the first fatal error if any.
    pub fn try_run(self, program: Vec<Instruction>) -> SimResult<SimulationReport> {
        self.simulator(program).run()
    }

    /// Runs `program` to completion.
    pub fn run(self, program: Vec<Instruction>) -> SimulationReport {
        match self.try_run(program) {
            Ok(report) => report,
            Err(e) => panic!("simulation failed: {e}"),
        }
    }
}
