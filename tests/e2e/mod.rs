// End-to-end tests for the Narrator Backend API
//
// Each test starts the real router on an ephemeral port, backed by a fake
// speech provider and a temporary output directory. No network access or
// provider credentials are needed.

mod helpers;
mod test_voices;
