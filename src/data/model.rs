use indexmap::IndexMap;

/// Marker stored in `x` for a sample whose x value is still to be interpolated.
pub const MISSING: f64 = f64::NAN;

/// Whether an x value is the [`MISSING`] marker.
#[inline]
pub fn is_missing(v: f64) -> bool {
    v.is_nan()
}

// ---------------------------------------------------------------------------
// Signal – one labeled block of the input file
// ---------------------------------------------------------------------------

/// Parallel x/y sample sequences. `x.len() == y.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    /// X coordinates; may contain [`MISSING`] until interpolated.
    x: Vec<f64>,
    /// Y coordinates – same length as `x`, never missing.
    y: Vec<f64>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Signal {
            x: Vec::with_capacity(cap),
            y: Vec::with_capacity(cap),
        }
    }

    /// Build a signal from parallel sequences, or `None` if their lengths differ.
    pub fn from_xy(x: Vec<f64>, y: Vec<f64>) -> Option<Self> {
        (x.len() == y.len()).then_some(Signal { x, y })
    }

    /// Append one sample. Pass [`MISSING`] for an unknown x.
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Mutable access to x only; the length cannot change through a slice.
    pub fn x_mut(&mut self) -> &mut [f64] {
        &mut self.x
    }

    /// Iterate `(x, y)` pairs in sample order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Count of x values still marked [`MISSING`].
    pub fn missing_x(&self) -> usize {
        self.x.iter().filter(|v| is_missing(**v)).count()
    }
}

// ---------------------------------------------------------------------------
// SignalSet – label → Signal, in file order
// ---------------------------------------------------------------------------

/// All signals of one input, keyed by label and kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalSet {
    signals: IndexMap<String, Signal>,
}

impl SignalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `signal` under `label`, returning the signal it replaced.
    ///
    /// A replaced label keeps its original position in iteration order.
    pub fn insert(&mut self, label: impl Into<String>, signal: Signal) -> Option<Signal> {
        self.signals.insert(label.into(), signal)
    }

    pub fn get(&self, label: &str) -> Option<&Signal> {
        self.signals.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Signal)> {
        self.signals.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Signal)> {
        self.signals.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.signals.keys().map(String::as_str)
    }

    /// Number of signals.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Total samples across all signals.
    pub fn total_samples(&self) -> usize {
        self.signals.values().map(Signal::len).sum()
    }
}
