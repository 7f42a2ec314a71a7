//! Parse labeled X/Y signal files, repair missing x coordinates and
//! summarise each signal.
//!
//! ```
//! use std::io::Cursor;
//! use signal_plot::data::{loader, stats};
//!
//! let input = "A\n* 0\n* 1\n1.0 2\n* 3\n3.0 4\nEND_OF_SIGNAL\n";
//! let signals = loader::load_reader(Cursor::new(input)).unwrap();
//! assert_eq!(signals.get("A").unwrap().x(), [1.0, 1.0, 1.0, 2.0, 3.0]);
//!
//! let report = stats::signal_stats(&signals);
//! assert_eq!(report[0].count, 5);
//! ```

pub mod data;
