//! Pure display-formatting routines for a transfer-client monitoring
//! dashboard: byte magnitudes, transfer rates, share ratios, coarsened
//! durations, local timestamps, pluralized counts, and peer status flags.
//!
//! Every formatter is a total function returning a `String`; the only
//! ambient input is the wall clock, and the timestamp formatter exposes an
//! explicit-`now` variant for deterministic use.

pub mod clock;
pub mod flags;
pub mod labels;
pub mod numeric;
pub mod plural;
pub mod ratio;
pub mod speed;
pub mod units;

pub use clock::{time_interval, timestamp, timestamp_at};
pub use flags::{decode, peer_status, FlagToken, PeerFlag};
pub use labels::Labels;
pub use numeric::{trunc_fixed, with_commas};
pub use plural::{count_string, ngettext};
pub use ratio::{percent, ratio};
pub use speed::{speed, speed_bps, to_kbps};
pub use units::{mem, size};
