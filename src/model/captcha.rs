//! CAPTCHA gate: challenge generation, input buffer and verification

use crate::config::CODE_LENGTH;
use crate::error::GalleryError;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of symbol indices for challenge codes
pub trait CodeSource: Send {
    /// Returns a value in `0..bound`
    fn next_index(&mut self, bound: usize) -> Result<usize, GalleryError>;
}

/// Indices drawn from OS entropy
pub struct OsCodeSource;

impl CodeSource for OsCodeSource {
    fn next_index(&mut self, bound: usize) -> Result<usize, GalleryError> {
        let mut buf = [0u8; 8];
        getrandom::fill(&mut buf).map_err(|e| GalleryError::RandomSource(e.to_string()))?;
        Ok((u64::from_le_bytes(buf) % bound as u64) as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Unverified,
    Verified,
}

/// Outcome of a successful submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    /// The gate flipped on this submission
    JustVerified,
    AlreadyVerified,
}

pub struct CaptchaGate {
    code: String,
    input: String,
    state: GateState,
    failed_attempts: u32,
    source: Box<dyn CodeSource>,
}

impl CaptchaGate {
    pub fn new() -> Result<Self, GalleryError> {
        Self::with_source(Box::new(OsCodeSource))
    }

    pub fn with_source(source: Box<dyn CodeSource>) -> Result<Self, GalleryError> {
        let mut gate = Self {
            code: String::new(),
            input: String::new(),
            state: GateState::Unverified,
            failed_attempts: 0,
            source,
        };
        gate.generate_challenge()?;
        Ok(gate)
    }

    /// Replace the current challenge and reset any typed input.
    /// On a source failure the previous code stays in place.
    pub fn generate_challenge(&mut self) -> Result<(), GalleryError> {
        let mut code = String::with_capacity(CODE_LENGTH);
        for _ in 0..CODE_LENGTH {
            code.push(ALPHABET[self.source.next_index(ALPHABET.len())?] as char);
        }
        self.code = code;
        self.input.clear();
        tracing::debug!("New CAPTCHA challenge issued");
        Ok(())
    }

    pub fn submit(&mut self, input: &str) -> Result<Verification, GalleryError> {
        if self.state == GateState::Verified {
            return Ok(Verification::AlreadyVerified);
        }

        if input == self.code {
            self.state = GateState::Verified;
            self.input.clear();
            tracing::info!(attempts = self.failed_attempts + 1, "CAPTCHA verified");
            Ok(Verification::JustVerified)
        } else {
            self.failed_attempts += 1;
            tracing::info!(attempt = self.failed_attempts, "CAPTCHA mismatch");
            self.generate_challenge()?;
            Err(GalleryError::ChallengeFailed)
        }
    }

    /// Submit whatever is currently in the input buffer
    pub fn submit_input(&mut self) -> Result<Verification, GalleryError> {
        let input = std::mem::take(&mut self.input);
        self.submit(&input)
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_verified(&self) -> bool {
        self.state == GateState::Verified
    }
}
