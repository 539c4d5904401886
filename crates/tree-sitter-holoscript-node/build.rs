//! Link arguments for building a Node-API addon.

fn main() {
    napi_build::setup();
}
