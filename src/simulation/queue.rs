/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::CapacityExceeded;
use crate::shared::Request;

/**
 * Bounded request queue.
 *
 * Holds unmatched trip requests in arrival order. The dispatcher removes
 * matched entries from anywhere in the queue; the relative order of the
 * remaining requests is preserved. Capacity is fixed at construction and an
 * arrival that finds the queue full is rejected with `CapacityExceeded`
 * (drop-newest, the caller decides what to log).
 */
pub struct RequestQueue {
    requests: Vec<Request>,
    capacity: usize,
}

impl RequestQueue {
    pub fn new(capacity: usize) -> RequestQueue {
        RequestQueue {
            requests: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn enqueue(&mut self, request: Request) -> Result<(), CapacityExceeded> {
        if self.requests.len() >= self.capacity {
            return Err(CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.requests.push(request);
        Ok(())
    }

    /// Removes and returns the request at `index`, shifting later requests
    /// down without reordering them.
    pub fn remove(&mut self, index: usize) -> Request {
        self.requests.remove(index)
    }

    pub fn get(&self, index: usize) -> &Request {
        &self.requests[index]
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
