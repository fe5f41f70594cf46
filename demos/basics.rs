use circbuf::RingBuffer;

fn main() {
    let mut rb = RingBuffer::new(4).unwrap();

    for i in 0..6 {
        if let Err(err) = rb.enqueue(i) {
            println!("{}, dropping {}", err, i);
        }
    }

    while let Some(i) = rb.dequeue() {
        println!("got = {}", i);
    }
}
