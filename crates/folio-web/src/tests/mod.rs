mod harness;
mod pages;
