fn main() {
    #[cfg(feature = "csr")]
    signup_client::mount();
}
