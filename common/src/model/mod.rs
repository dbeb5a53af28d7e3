pub mod coordenadas;
pub mod cultivo;
pub mod finca;
pub mod usuario;
