mod crud;
mod horse;
mod market;
mod rental;
mod user;
