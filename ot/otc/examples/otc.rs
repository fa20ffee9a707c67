// This example demonstrates how to privately transfer one of two messages using OT.
// In practical situations the values would be communicated over a channel such as TCP.
// For simplicity, this example shows a single transfer in memory.

use otc::{Ciphertext, PublicKey, Query, Receiver, Sender};
use tracing_subscriber::filter::LevelFilter;

pub fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .init();

    // Receiver choice bit
    let choice = 1;

    println!("Receiver choice: {choice}");

    // Sender messages the receiver chooses from
    let inputs = [[123u8; 16], [234u8; 16]];

    println!("Sender inputs: {:?}", &inputs);

    // First the sender publishes its public key
    let sender = Sender::default();
    let sender_public = sender.public_key().to_bytes();

    // Receiver decodes the sender's key and blinds its choice into a query
    let receiver = Receiver::default();
    let sender_public = PublicKey::try_from(sender_public.as_slice()).unwrap();
    let query = receiver.query(&sender_public, choice).unwrap().to_bytes();

    println!("Query: {}", hex::encode(query));

    // Sender encrypts both inputs under keys derived from the query
    let query = Query::try_from(query.as_slice()).unwrap();
    let (zero, one) = sender
        .reply(&query, inputs[0], inputs[1])
        .unwrap()
        .into_pair();
    let ciphertexts = [zero.to_bytes(), one.to_bytes()];

    // Receiver is only able to decrypt the message it chose
    let zero = Ciphertext::try_from(ciphertexts[0].as_slice()).unwrap();
    let one = Ciphertext::try_from(ciphertexts[1].as_slice()).unwrap();
    let received = receiver.elect(&sender_public, choice, &zero, &one).unwrap();

    println!("Transferred message: {:?}", received.as_bytes());
}
