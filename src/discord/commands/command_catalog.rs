// Discord commands module.
// Each feature gets its own command file.

pub mod general;

// Bot presence management
pub mod presence;
