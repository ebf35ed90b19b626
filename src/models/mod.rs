// Start of file: /src/models/mod.rs

/*
    * Data models serialized into response bodies.
*/

pub mod response;

// End of file: /src/models/mod.rs
