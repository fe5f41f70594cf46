use circbuf::error::PushError;
use circbuf::{BlockMode, RingBuffer};
use futures_util::{SinkExt, StreamExt};

#[tokio::test]
async fn sink_sends_until_full() {
    let mut rb = RingBuffer::new(3).unwrap();

    let mut sink = rb.sink();
    for i in 0..3 {
        sink.send(i).await.unwrap();
    }
    assert_eq!(sink.send(3).await, Err(PushError::Full));
    drop(sink);

    assert!(rb.is_full());
    assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[tokio::test]
async fn sink_feed_then_flush() {
    let mut rb = RingBuffer::new(4).unwrap();

    let mut sink = rb.sink();
    sink.feed(1).await.unwrap();
    sink.feed(2).await.unwrap();
    sink.flush().await.unwrap();
    drop(sink);

    assert_eq!(rb.len(), 2);
}

#[tokio::test]
async fn closed_sink_rejects_sends() {
    let mut rb = RingBuffer::new(4).unwrap();

    let mut sink = rb.sink();
    sink.send(1).await.unwrap();
    sink.close().await.unwrap();
    let err = sink.send(2).await.unwrap_err();
    assert!(err.is_closed() && !err.is_full());
    assert_eq!(err.to_string(), "sink was closed and no longer holds a ring buffer");
    drop(sink);

    assert_eq!(rb.dequeue(), Some(1));
    assert!(rb.is_empty());
}

#[tokio::test]
async fn drain_stream_ends_when_empty() {
    let mut rb = RingBuffer::new(4).unwrap();
    rb.fill_block(&[1, 2, 3, 4], BlockMode::Exact);
    rb.dequeue();
    rb.enqueue(5).unwrap();

    // Drain is also an Iterator, so the stream methods are named explicitly
    let items: Vec<_> = StreamExt::collect(rb.drain()).await;
    assert_eq!(items, vec![2, 3, 4, 5]);
    assert!(rb.is_empty());
}

#[tokio::test]
async fn drain_stream_leaves_unpulled_elements() {
    let mut rb = RingBuffer::new(4).unwrap();
    rb.fill_block(&[1, 2, 3], BlockMode::Exact);

    let mut drain = rb.drain();
    assert_eq!(StreamExt::next(&mut drain).await, Some(1));
    drop(drain);

    assert_eq!(rb.len(), 2);
    assert_eq!(rb.dequeue(), Some(2));
}

#[test]
fn drain_iterator_reports_exact_len() {
    let mut rb = RingBuffer::new(4).unwrap();
    rb.fill_block(&["a", "b"], BlockMode::Exact);

    let drain = rb.drain();
    assert_eq!(ExactSizeIterator::len(&drain), 2);
    assert_eq!(Iterator::collect::<Vec<_>>(drain), vec!["a", "b"]);
}
