//! Global subscriber installation. Kept in its own test binary because the
//! subscriber can only be set once per process.

use prefetch_observability::init_tracing;

#[test]
fn second_install_fails_instead_of_panicking() {
    init_tracing().unwrap();
    assert!(init_tracing().is_err());
}
