//! JKS keystore container support.
//!
//! This module provides parsing of the JKS version 2 format and alias-based
//! access to the entries it holds.

pub mod entry;
pub mod keystore;
mod reader;
