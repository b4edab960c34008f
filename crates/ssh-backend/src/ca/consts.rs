/// Path of the CA configuration endpoint within the mount.
pub const CA_CONFIG_PATH: &str = "config/ca";

/// Storage slot holding the raw authorized-keys line of the CA public key.
pub const PUBLIC_KEY_STORAGE_KEY: &str = "public_key";

/// Storage slot holding the [`SigningBundle`](super::SigningBundle) with
/// the CA private key.
pub const CA_BUNDLE_STORAGE_KEY: &str = "config/ca_bundle";
