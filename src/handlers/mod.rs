// handlers/mod.rs - two security tiers
//
// Public (no token) → Protected (session token required)
pub mod protected; // catalog reads and writes, behind require_auth
pub mod public; // sign-in, user creation, health
