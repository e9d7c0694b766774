pub mod simulated_gateway;
