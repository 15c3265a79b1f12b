use ecckit::{named_curves::domain_parameters, EcdhParty};

fn main() {
    let params = domain_parameters("NIST P-256").expect("known curve");

    let mut rng = rand::thread_rng();
    let alice = EcdhParty::generate(&mut rng, params.generator.clone(), params.order.clone());
    let bob = EcdhParty::generate(&mut rng, params.generator, params.order);

    let alice_secret = alice.shared_secret(bob.public_key()).unwrap();
    let bob_secret = bob.shared_secret(alice.public_key()).unwrap();
    assert_eq!(alice_secret, bob_secret);

    println!("alice's public point: {}", alice.public_key());
    println!("bob's public point:   {}", bob.public_key());
    println!("shared secret (x):    {alice_secret}");
}
