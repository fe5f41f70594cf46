use circbuf::{BlockMode, RingBuffer};

fn main() {
    let mut rb = RingBuffer::new(8).unwrap();
    let frames: Vec<u16> = (0..12).collect();

    let n = rb.fill_block(&frames, BlockMode::Exact);
    println!("exact fill of {} frames moved {}", frames.len(), n);

    let n = rb.fill_block(&frames, BlockMode::BestEffort);
    println!("best-effort fill moved {}, {:?}", n, rb);

    let mut out = [0u16; 5];
    while rb.drain_block(&mut out, BlockMode::Exact) > 0 {
        println!("block = {:?}", out);
    }

    let n = rb.drain_block(&mut out, BlockMode::BestEffort);
    println!("tail = {:?}", &out[..n]);
}
