fn main() -> Result<(), Box<dyn std::error::Error>> {
    faceless::cli::main()
}
