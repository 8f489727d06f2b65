//! End-to-end tests over the public crate API: text in, entries,
//! totals, settlement and ledger out.

mod mock_settlement;
mod pipeline;
