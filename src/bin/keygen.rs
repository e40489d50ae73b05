//! Print fresh action signing keypairs for local testing and ops.

use collab_action::auth::keygen::{generate_ecdsa_keypair, generate_ed25519_keypair};

fn main() {
    let ed25519 = generate_ed25519_keypair();
    let ecdsa = generate_ecdsa_keypair();

    println!("Ed25519 keypair:");
    println!("  private key: {}", ed25519.private_key);
    println!("  public key:  {}", ed25519.public_key);
    println!();
    println!("ECDSA (secp256k1) keypair:");
    println!("  private key: {}", ecdsa.private_key);
    println!("  public key:  {}", ecdsa.public_key);
}
