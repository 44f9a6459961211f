pub mod flow;
pub mod otp;
pub mod session;
pub mod signup;
pub mod verify;
