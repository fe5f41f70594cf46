use circbuf::RingBuffer;
use futures_util::{SinkExt, StreamExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut rb = RingBuffer::new(16).unwrap();

    let mut sink = rb.sink();
    for i in 0..20 {
        if let Err(err) = sink.send(i).await {
            println!("send {} failed: {}", i, err);
            break;
        }
    }

    let mut stream = rb.drain();
    while let Some(i) = StreamExt::next(&mut stream).await {
        println!("got = {}", i);
    }
}
