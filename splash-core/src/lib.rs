#![no_std]

// Portable logic for the splash trigger controller.
//
// This crate stays free of executor and HAL dependencies so the timing
// model, wire codecs, and shared-state primitives can be compiled for
// both the MCU firmware and host-side test suites.

pub mod command;
pub mod config;
pub mod gate;
pub mod indicator;
pub mod link;
pub mod store;
pub mod timing;
