use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic random stream built on a SHAKE256 hash chain.
///
/// Every draw is domain-separated by a context tag, so the same seed
/// reproduces the same initial points, SPSA directions and shot samples.
#[derive(Clone)]
pub struct ShakeRng {
    state: [u8; 32],
    step: u64,
}

impl ShakeRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"SHAKE_RNG_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Derives an independent stream, e.g. one per sweep point.
    pub fn fork(&self, label: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[&self.state, b"FORK", label], &mut state);
        Self { state, step: 0 }
    }

    /// Uniform draw in `[0, 1]`.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"ADVANCE"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        (u64::from_be_bytes(out) as f64) / (u64::MAX as f64)
    }

    /// Uniform draw in `[lo, hi]`.
    pub fn uniform(&mut self, ctx: &[u8], lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64(ctx)
    }

    /// Rademacher draw: `+1.0` or `-1.0` with equal probability.
    pub fn sign(&mut self, ctx: &[u8]) -> f64 {
        if self.next_f64(ctx) < 0.5 {
            1.0
        } else {
            -1.0
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
