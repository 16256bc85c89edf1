//! End-to-end tests for the varietal catalog loader and collection generator.

mod collection;
mod varietals;

use cellar_test_utils::prelude::*;
