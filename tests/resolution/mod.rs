//! End-to-end tests for the location resolution engine.
//!
//! These tests exercise the full path a place reference travels in
//! production: reference data flows in through the ingestion readers and
//! loader, and free-text references are then resolved against the
//! populated catalog through the service layer.

use waybill::{
    model::resolution::TransportMode,
    service::resolver::{format_canonical, ResolutionCache, ResolverService},
};
use waybill_test_utils::prelude::*;

mod cascade_order;
