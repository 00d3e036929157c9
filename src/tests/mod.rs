//! Cross-module scenario tests, mirroring published phase tables for 2024.
