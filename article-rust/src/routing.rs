use std::sync::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self { replace: true }
    }
}

/// Navigation surface of the host application.
pub trait Router: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, target: &str, options: NavigateOptions);
}

#[derive(Debug, Default)]
struct MemoryRouterState {
    history: Vec<String>,
    navigations: Vec<(String, NavigateOptions)>,
}

/// History stack kept in memory, for hosts without a browser history and
/// for tests.
#[derive(Debug)]
pub struct MemoryRouter {
    state: Mutex<MemoryRouterState>,
}

impl MemoryRouter {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(MemoryRouterState {
                history: vec![initial_path.into()],
                navigations: Vec::new(),
            }),
        }
    }

    /// Every entry of the history stack, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.history.clone())
            .unwrap_or_default()
    }

    /// Every `navigate` call received, in order.
    pub fn navigations(&self) -> Vec<(String, NavigateOptions)> {
        self.state
            .lock()
            .map(|state| state.navigations.clone())
            .unwrap_or_default()
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.history.last().cloned())
            .unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, target: &str, options: NavigateOptions) {
        let Ok(mut state) = self.state.lock() else {
            tracing::warn!(path = target, "router state poisoned");
            return;
        };
        state.navigations.push((target.to_string(), options));
        if options.replace {
            state.history.pop();
        }
        state.history.push(target.to_string());
    }
}
