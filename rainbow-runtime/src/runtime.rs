//! Main runtime implementation

use crate::error::{RuntimeError, RuntimeResult};
use crate::loader::ProgramLoader;
use rainbow_core::{ExitStatus, Instruction, Interpreter, InterpreterStats, VmConfig};
use std::path::Path;

/// Configuração do runtime
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// VM construction parameters
    pub vm: VmConfig,

    /// Debug mode
    pub debug: bool,
}

/// Runtime principal para programas Rainbow
pub struct RainbowRuntime {
    config: RuntimeConfig,
    program: Option<Vec<String>>,
    stats: Option<InterpreterStats>,
}

impl RainbowRuntime {
    /// Cria novo runtime
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            program: None,
            stats: None,
        }
    }

    /// Carrega listing de arquivo
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> RuntimeResult<()> {
        if self.config.debug {
            println!("📂 Loading Rainbow listing: {}", path.as_ref().display());
        }

        let program = ProgramLoader::load_file(path)?;
        self.set_program(program);
        Ok(())
    }

    /// Carrega listing de texto diretamente
    pub fn load_source(&mut self, source: &str) -> RuntimeResult<()> {
        let program = ProgramLoader::parse_listing(source)?;
        self.set_program(program);
        Ok(())
    }

    fn set_program(&mut self, program: Vec<String>) {
        if self.config.debug {
            println!("✓ Loaded {} instruction words", program.len());
            Self::print_listing(&program);
        }
        self.program = Some(program);
    }

    /// Executa programa carregado.
    ///
    /// VM faults are classified into an exit status here, exactly once;
    /// only load-time problems surface as errors.
    pub fn run(&mut self) -> RuntimeResult<ExitStatus> {
        let program = self.program.clone().ok_or(RuntimeError::NoProgram)?;

        if self.config.debug {
            println!("🚀 Executing program...\n");
        }

        let mut vm = Interpreter::new(program, &self.config.vm);
        let status = match vm.execute() {
            Ok(status) => status,
            Err(e) => {
                let status = e.status();
                eprintln!("\n{}: {}", status, e);
                status
            }
        };

        self.stats = Some(vm.stats().clone());
        Ok(status)
    }

    /// Executa arquivo diretamente (load + run)
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> RuntimeResult<ExitStatus> {
        self.load_file(path)?;
        self.run()
    }

    /// Executa listing de texto diretamente
    pub fn run_source(&mut self, source: &str) -> RuntimeResult<ExitStatus> {
        self.load_source(source)?;
        self.run()
    }

    /// Statistics of the last run
    pub fn stats(&self) -> Option<&InterpreterStats> {
        self.stats.as_ref()
    }

    /// Decoded program listing for debug output
    fn print_listing(program: &[String]) {
        for (i, word) in program.iter().enumerate() {
            match Instruction::decode(word) {
                Ok(instr) => println!("   {:04}: {}  {}", i, word, instr.disassemble()),
                Err(_) => println!("   {:04}: {}  ??", i, word),
            }
        }
    }
}
