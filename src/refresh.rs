use std::sync::{Arc, RwLock};

/// A UI collaborator that renders some view of the Roster (crew-assignment
/// panel, astronaut roster list) and can rebuild it from current contents.
pub trait RosterView: Send + Sync {
    fn rebuild(&mut self);
}

/// Tells registered views to rebuild their displayed lists from the Roster.
///
/// Views are injected collaborators and may be absent entirely. A refresh is
/// requested at most once per drain cycle per routine, never once per record;
/// a rebuild is expensive and a network burst can deliver dozens of records
/// in one tick.
#[derive(Default)]
pub struct RefreshNotifier {
    views: Vec<Arc<RwLock<dyn RosterView>>>,
}

impl RefreshNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, view: Arc<RwLock<dyn RosterView>>) {
        self.views.push(view);
    }

    /// Idempotent; mutates nothing in the Roster
    pub fn request_refresh(&self) {
        for view in &self.views {
            if let Ok(mut view) = view.write() {
                view.rebuild();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use super::{RefreshNotifier, RosterView};

    struct CountingView {
        rebuilds: usize,
    }

    impl RosterView for CountingView {
        fn rebuild(&mut self) {
            self.rebuilds += 1;
        }
    }

    #[test]
    fn refresh_reaches_every_view() {
        let mut notifier = RefreshNotifier::new();
        let view_a = Arc::new(RwLock::new(CountingView { rebuilds: 0 }));
        let view_b = Arc::new(RwLock::new(CountingView { rebuilds: 0 }));
        notifier.register(view_a.clone());
        notifier.register(view_b.clone());

        notifier.request_refresh();
        notifier.request_refresh();

        assert_eq!(view_a.read().unwrap().rebuilds, 2);
        assert_eq!(view_b.read().unwrap().rebuilds, 2);
    }

    #[test]
    fn refresh_with_no_views_is_a_no_op() {
        let notifier = RefreshNotifier::new();
        notifier.request_refresh();
    }
}
