// Example: window a million rows from plain measurements.
use viewport::{Measurements, WindowOptions, compute_state};

fn main() {
    let options = WindowOptions::new(1_000_000, 24).with_buffer_size(3);
    let rows: Vec<String> = (0..options.total).map(|i| format!("row {i}")).collect();

    let m = Measurements {
        scroll_offset: 123_456,
        client_height: 600,
        ..Measurements::default()
    };
    let Some(state) = compute_state(&m, &options) else {
        return;
    };

    println!("content_height={}", state.content_height);
    println!("range={:?} top_offset={}", state.range(), state.top_offset);
    println!("first={:?}", state.slice(&rows).first());
}
