#![cfg(test)]

//! Test-only bootstrap helpers.
