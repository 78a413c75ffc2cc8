//! Chart geometry and scoring core behind the MSME project report studio.
//!
//! Everything under [`geometry`], [`sensitivity`] and [`scoring`] is a pure
//! function of its inputs. [`dashboard`] assembles those primitives into
//! serializable views for whichever presentation layer calls it.

pub mod config;
pub mod dashboard;
pub mod datasets;
pub mod error;
pub mod geometry;
pub mod scoring;
pub mod sensitivity;
pub mod telemetry;
