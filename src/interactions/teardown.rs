/// Something attached to the page that can be taken off again.
pub trait Detach {
    fn detach(self: Box<Self>);
}

/// Everything a mounted page attached, detached newest first.
///
/// Parts still held when the ledger is dropped are detached too, so a
/// listener's callback is never freed while it is still registered.
#[derive(Default)]
pub struct Teardown {
    parts: Vec<Box<dyn Detach>>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<D: Detach + 'static>(&mut self, part: D) {
        self.parts.push(Box::new(part));
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Detaches everything and returns how many parts were detached.
    pub fn run(mut self) -> usize {
        self.detach_all()
    }

    fn detach_all(&mut self) -> usize {
        let mut detached = 0;
        while let Some(part) = self.parts.pop() {
            part.detach();
            detached += 1;
        }
        detached
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.detach_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct Recorded {
        name: &'static str,
        log: Log,
    }

    impl Detach for Recorded {
        fn detach(self: Box<Self>) {
            self.log.borrow_mut().push(self.name);
        }
    }

    fn ledger(names: &[&'static str]) -> (Teardown, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut teardown = Teardown::new();
        for name in names {
            teardown.add(Recorded {
                name: *name,
                log: log.clone(),
            });
        }
        (teardown, log)
    }

    #[test]
    fn run_detaches_every_part_newest_first() {
        let (teardown, log) = ledger(&["nav scroll", "portfolio click", "resize"]);
        assert_eq!(teardown.len(), 3);

        assert_eq!(teardown.run(), 3);
        assert_eq!(*log.borrow(), vec!["resize", "portfolio click", "nav scroll"]);
    }

    #[test]
    fn each_part_detaches_exactly_once() {
        let (teardown, log) = ledger(&["tab click", "indicator click"]);
        teardown.run();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn dropping_the_ledger_detaches_what_is_left() {
        let (teardown, log) = ledger(&["stats observer", "window scroll"]);
        drop(teardown);
        assert_eq!(*log.borrow(), vec!["window scroll", "stats observer"]);
    }

    #[test]
    fn remount_after_teardown_leaves_one_set_attached() {
        let attached = Rc::new(RefCell::new(0));

        struct Handler(Rc<RefCell<i32>>);
        impl Detach for Handler {
            fn detach(self: Box<Self>) {
                *self.0.borrow_mut() -= 1;
            }
        }
        let mount = |attached: &Rc<RefCell<i32>>| {
            let mut teardown = Teardown::new();
            for _ in 0..4 {
                *attached.borrow_mut() += 1;
                teardown.add(Handler(attached.clone()));
            }
            teardown
        };

        let first = mount(&attached);
        first.run();
        let second = mount(&attached);
        assert_eq!(*attached.borrow(), 4);

        second.run();
        assert_eq!(*attached.borrow(), 0);
    }

    #[test]
    fn empty_ledger_runs_cleanly() {
        let teardown = Teardown::new();
        assert_eq!(teardown.len(), 0);
        assert_eq!(teardown.run(), 0);
    }
}
