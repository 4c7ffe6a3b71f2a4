#![doc = include_str!("../README.md")]

mod samples;

pub use benchmark::{
    benchmark, benchmark_with, run_timed_block, run_timed_block_with, BenchmarkResult, Evaluate,
    Thunk,
};
pub use clock::{Clock, MonotonicClock};
pub use error::{BenchError, ConfigError};
pub use samples::Samples;
pub use sweep::{run_sweep, run_sweep_with, sweep, SweepConfig, SweepReport};
pub use tight_loop::{
    run_tight_loop, run_tight_loop_with, tight_loop, TightLoopConfig, TightLoopReport,
};
pub use warm_up::WarmUp;

//----------------------------------------------------------------------------------------------------
