//! Board-Odds: Monte Carlo visitation estimates for a simplified Monopoly board.
//!
//! This crate estimates how often each of the 40 board squares is visited.
//! Dice-driven turns are sampled from every square to build an empirical
//! transition matrix, which is then refined with PageRank power iteration.
//!
//! ## Modules
//!
//! - [`constants`] - Board topology, dice, and default parameters
//! - [`board`] - Square classification and card redirect tables
//! - [`dice`] - Two-die rolls
//! - [`movement`] - One full turn of movement
//! - [`sampler`] - Transition count sampling
//! - [`matrix`] - Count and probability matrices, row normalization
//! - [`pagerank`] - Power iteration
//! - [`report`] - Ranking and text output
//! - [`config`] - Run parameters
//! - [`estimate`] - The end-to-end pipeline
//!
//! ## Example
//!
//! ```
//! use board_odds::config::SimConfig;
//! use board_odds::estimate::estimate;
//! use board_odds::report::render;
//!
//! let cfg = SimConfig { samples: 100, iterations: 100, seed: Some(7), ..SimConfig::default() };
//! let est = estimate(&cfg, &mut cfg.rng());
//! print!("{}", render(&est.entries));
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod dice;
pub mod estimate;
pub mod matrix;
pub mod movement;
pub mod pagerank;
pub mod report;
pub mod sampler;
