// @generated
pub mod sf {
    pub mod solana {
        pub mod spl {
            pub mod token {
                // @@protoc_insertion_point(attribute:sf.solana.spl.token.v1)
                pub mod v1 {
                    include!("sf.solana.spl.token.v1.rs");
                    // @@protoc_insertion_point(sf.solana.spl.token.v1)
                }
            }
        }
    }
    pub mod substreams {
        pub mod rpc {
            // @@protoc_insertion_point(attribute:sf.substreams.rpc.v2)
            pub mod v2 {
                include!("sf.substreams.rpc.v2.rs");
                // @@protoc_insertion_point(sf.substreams.rpc.v2)
            }
        }
        pub mod sink {
            pub mod database {
                // @@protoc_insertion_point(attribute:sf.substreams.sink.database.v1)
                pub mod v1 {
                    include!("sf.substreams.sink.database.v1.rs");
                    // @@protoc_insertion_point(sf.substreams.sink.database.v1)
                }
            }
        }
        // @@protoc_insertion_point(attribute:sf.substreams.v1)
        pub mod v1 {
            include!("sf.substreams.v1.rs");
            // @@protoc_insertion_point(sf.substreams.v1)
        }
    }
}
