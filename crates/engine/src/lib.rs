//! Engine module - the producer/consumer control loop.
//!
//! One game runs as three concurrent activities around an unbounded MPSC
//! command queue:
//!
//! - the input producer (blocking thread) enqueues one command per mapped key
//! - the gravity producer (async task) enqueues a soft drop every interval
//! - the consumer ([`ControlLoop`]) redraws and applies one command per poll
//!
//! The consumer exclusively owns the [`core::Board`]. It shares only the stop
//! flag and the gravity interval with the producers (see [`context`]).

pub mod config;
pub mod context;
pub mod control;
pub mod producers;
pub mod runtime;

pub use termtris_core as core;
pub use termtris_input as input;
pub use termtris_term as term;
pub use termtris_types as types;

pub use config::GameConfig;
pub use context::{Controls, LoopContext};
pub use control::{ControlLoop, Flow, GameEnd};
pub use producers::{gravity_producer, input_producer, CommandReceiver, CommandSender};
pub use runtime::run_game;
