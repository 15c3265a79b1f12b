use ecckit::{named_curves::domain_parameters, SigningKey};

fn main() {
    let params = domain_parameters("secp256k1").expect("known curve");

    let mut rng = rand::thread_rng();
    let signing_key = SigningKey::generate(&mut rng, params).unwrap();
    let verifying_key = signing_key.verifying_key();

    let message = b"hello world";
    let signature = signing_key.sign(&mut rng, message).unwrap();

    println!("r = {}", signature.r());
    println!("s = {}", signature.s());
    assert!(verifying_key.verify(message, &signature));
    assert!(!verifying_key.verify(b"hello volt", &signature));
}
