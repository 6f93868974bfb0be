pub mod tracker_forwarder;
