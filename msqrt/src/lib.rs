//! This crate compiles all the interfaces of `msqrt_core` and
//! `msqrt_engine`.

pub use msqrt_core::prelude::*;
#[cfg(feature = "msqrt_engine")]
pub use msqrt_engine;
#[cfg(feature = "msqrt_engine")]
pub use msqrt_engine::{
    run_basic, run_practical, BasicConfig, ConfigError, EngineError, PracticalConfig, Problem,
    RunReport, SrtTable, Step, StepObserver,
};

pub mod prelude {
    pub use crate::*;
}
