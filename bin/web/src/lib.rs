//! Browser front-end for ballotbox.
//!
//! A client-side rendered Leptos app. Sessions live in `localStorage`, so
//! everything from route guarding to API calls runs in the browser.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod logging;
pub mod pages;
