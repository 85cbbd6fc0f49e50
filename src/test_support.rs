use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn apply(key: &str, value: Option<&OsString>) {
    #[allow(unused_unsafe)]
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}

/// Holds the global env lock and restores overridden variables on drop,
/// including when the test body panics.
struct EnvGuard<'a> {
    backups: Vec<(&'a str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl<'a> EnvGuard<'a> {
    fn new(overrides: &[(&'a str, Option<&str>)]) -> Self {
        let lock = env_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let backups = overrides
            .iter()
            .map(|(key, _)| (*key, env::var_os(key)))
            .collect();
        for (key, value) in overrides {
            apply(key, value.map(OsString::from).as_ref());
        }
        Self {
            backups,
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard<'_> {
    fn drop(&mut self) {
        for (key, value) in self.backups.drain(..).rev() {
            apply(key, value.as_ref());
        }
    }
}

/// Runs a closure with one overridden environment variable.
pub(crate) fn with_env_var<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
    with_env_vars(&[(key, Some(value))], f)
}

/// Runs a closure with variables set (`Some`) or removed (`None`).
pub(crate) fn with_env_vars<T>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _guard = EnvGuard::new(overrides);
    f()
}
