//! One client shared by many threads against the mock server.

mod common;

use std::sync::Arc;
use std::thread;

use common::{client_for, spawn_mock_server, API_KEY};

const THREADS: u64 = 8;
const KEYS_PER_THREAD: u64 = 5;

#[test]
fn shared_client_keeps_calls_apart() {
    let base = spawn_mock_server();
    let client = Arc::new(client_for(&base, API_KEY));

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let client = Arc::clone(&client);
            thread::spawn(move || {
                for n in 0..KEYS_PER_THREAD {
                    let name = format!("worker-{worker}-key-{n}");
                    let created = client.new_api_key(worker + 1, &name).unwrap();
                    let viewed = client.view_api_key(created.id).unwrap();
                    assert_eq!(viewed.name, name);
                    assert_eq!(viewed.user.id, worker + 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let keys = client.list_api_keys().unwrap().api_keys;
    assert_eq!(keys.len() as u64, THREADS * KEYS_PER_THREAD);
}
