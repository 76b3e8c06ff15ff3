//! Cross-module tests for the config file layer
