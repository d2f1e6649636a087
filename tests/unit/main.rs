//! Unit test tree mirroring the src module layout

mod algorithm;
mod analysis;
mod io;
mod math;
mod spatial;
