pub mod filmes;
