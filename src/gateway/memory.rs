use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// InMemoryPublisher keeps events in a buffer shared by all of its clones, so a
// caller can hold one clone while the catalog owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.to_string()).collect()
    }
}

impl EventPublisher for InMemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::InMemoryPublisher;

    #[test]
    fn test_should_share_events_between_clones() {
        let handle = InMemoryPublisher::new();
        let mut publisher = handle.clone();
        publisher.publish(&DomainEvent::added("reader_added", "a@b.edu", &"Alice").expect("event"))
            .expect("should publish");
        assert_eq!(vec!["reader_added".to_string()], handle.names());
        assert_eq!(1, publisher.events().len());
    }
}
