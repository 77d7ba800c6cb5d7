use crate::error::AppError;

/// Shape of a single draw: how many tickets, how many numbers on each, and
/// the upper bound of the number range (the lower bound is always 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub numbers_per_ticket: usize,
    pub max_number: u8,
    pub tickets_per_draw: usize,
    /// Cap on rejection-sampling attempts per ticket before the sampler
    /// picks the rest directly from the unused values.
    pub max_draws: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            numbers_per_ticket: 6,
            max_number: 45,
            tickets_per_draw: 5,
            max_draws: 10_000,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(self) -> Result<Self, AppError> {
        if self.max_number == 0 {
            return Err(AppError::InvalidConfig("max_number must be at least 1".to_string()));
        }
        if self.numbers_per_ticket == 0 {
            return Err(
                AppError::InvalidConfig("numbers_per_ticket must be at least 1".to_string())
            );
        }
        if self.numbers_per_ticket > usize::from(self.max_number) {
            return Err(
                AppError::InvalidConfig(
                    format!(
                        "cannot pick {} distinct numbers from 1..={}",
                        self.numbers_per_ticket,
                        self.max_number
                    )
                )
            );
        }
        Ok(self)
    }
}
