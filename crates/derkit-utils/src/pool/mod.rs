//! Pooled scratch buffers for short-lived sensitive data.
//!
//! A rented buffer is wiped before it goes back to the free list, so a later
//! renter never observes another caller's bytes.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, OnceLock};
use zeroize::Zeroize;

/// Maximum number of idle buffers kept for reuse.
pub const MAX_POOLED_BUFFERS: usize = 32;
/// Buffers with a larger capacity are released instead of pooled.
pub const MAX_POOLED_CAPACITY: usize = 1 << 20;

static FREE_LIST: OnceLock<Mutex<Vec<Vec<u8>>>> = OnceLock::new();

fn free_list() -> &'static Mutex<Vec<Vec<u8>>> {
    FREE_LIST.get_or_init(|| Mutex::new(Vec::new()))
}

/// Process-wide pool of zeroizing byte buffers.
pub struct CryptoPool;

impl CryptoPool {
    /// Rent a zero-filled buffer of exactly `len` bytes.
    ///
    /// The buffer goes back to the pool when the guard is dropped.
    pub fn rent(len: usize) -> PooledBuffer {
        let reused = {
            let mut list = free_list().lock().unwrap_or_else(|e| e.into_inner());
            list.iter()
                .position(|b| b.capacity() >= len)
                .map(|i| list.swap_remove(i))
        };
        let mut buf = reused.unwrap_or_else(|| Vec::with_capacity(len));
        tracing::trace!(len, capacity = buf.capacity(), "rent pooled buffer");
        buf.resize(len, 0);
        PooledBuffer { buf }
    }

    /// Number of idle buffers currently held.
    pub fn idle_count() -> usize {
        free_list().lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn give_back(mut buf: Vec<u8>) {
        // Wipes the full capacity, not just the initialized length.
        buf.zeroize();
        if buf.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        let mut list = free_list().lock().unwrap_or_else(|e| e.into_inner());
        if list.len() < MAX_POOLED_BUFFERS {
            tracing::trace!(capacity = buf.capacity(), "return pooled buffer");
            list.push(buf);
        }
    }
}

/// A buffer rented from [`CryptoPool`]; returned on drop on every path.
pub struct PooledBuffer {
    buf: Vec<u8>,
}

impl Deref for PooledBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        CryptoPool::give_back(std::mem::take(&mut self.buf));
    }
}

impl std::fmt::Debug for PooledBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PooledBuffer([{} bytes])", self.buf.len())
    }
}
