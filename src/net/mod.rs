//! Networking modules for the analyzer backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client and the request/response contract shared by
//! every call to the backend.

pub mod api;
